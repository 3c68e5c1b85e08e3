mod common;

use std::sync::Arc;

use common::decode_payload;
use ztp::domain::CloudConfig;
use ztp::services::{INJECTED_SCRIPT_PREFIX, PER_ONCE_SCRIPTS_DIR};
use ztp::{
    AppError, DeploymentDescription, InMemoryScriptBundle, MapVariables, ScriptInjector,
    TemplateExecutor, TemplateStore,
};

fn store_with(description: DeploymentDescription) -> Arc<TemplateStore> {
    let store = Arc::new(TemplateStore::new());
    store.create(&description).expect("create should succeed");
    store
}

fn injector(bundle: InMemoryScriptBundle, vars: MapVariables) -> ScriptInjector {
    ScriptInjector::new(Arc::new(bundle), Arc::new(vars))
}

#[test]
fn empty_bundle_payload_is_rendered_content() {
    let store = store_with(
        DeploymentDescription::new("plain", "Plain", "").with_packages(["vim", "curl", "wget"]),
    );
    let content = store.get_content("plain").unwrap();

    let executor = TemplateExecutor::new(store, "plain", "{}")
        .unwrap()
        .with_injector(injector(InMemoryScriptBundle::empty(), MapVariables::new()));

    assert_eq!(decode_payload(&executor.execute().unwrap()), content);
}

#[test]
fn injection_keeps_document_and_adds_deferred_script() {
    let store = store_with(
        DeploymentDescription::new("inject", "Inject", "")
            .with_packages(["nginx"])
            .with_commands(["echo hi"]),
    );
    let bundle = InMemoryScriptBundle::empty().with_script("report.sh", "echo {{ .Stage }}\n");
    let executor = TemplateExecutor::new(store, "inject", "{}")
        .unwrap()
        .with_injector(injector(bundle, MapVariables::new().with_var("STAGE", "done")));

    let decoded = decode_payload(&executor.execute().unwrap());

    assert!(decoded.starts_with("#cloud-config\n"));
    assert!(decoded.contains("nginx"));
    assert!(decoded.contains("echo hi"));
    let config = CloudConfig::parse(decoded.as_bytes()).unwrap();
    let prefix = format!("{}/{}", PER_ONCE_SCRIPTS_DIR, INJECTED_SCRIPT_PREFIX);
    let entry = config
        .write_files
        .iter()
        .find(|entry| entry.path.starts_with(&prefix))
        .expect("injected entry");
    assert_eq!(entry.path, "/var/lib/cloud/scripts/per-once/zzzz-report.sh");
    assert!(entry.defer);
}

#[test]
fn default_bundle_injects_embedded_scripts() {
    let store = store_with(
        DeploymentDescription::new("embedded", "Embedded", "")
            .with_packages(["nginx"])
            .with_commands(["echo hi"]),
    );
    let executor = TemplateExecutor::new(store, "embedded", "{}").unwrap();

    let decoded = decode_payload(&executor.execute().unwrap());

    assert!(decoded.contains("#cloud-config"));
    assert!(decoded.contains("write_files"));
    assert!(decoded.contains("/var/lib/cloud/scripts/per-once/zzzz-"));
}

#[test]
fn parameters_are_substituted() {
    let store = store_with(
        DeploymentDescription::new("param_sub", "Param Sub", "")
            .with_parameter("ServerName", "Server name")
            .with_commands(["echo {{ .ServerName }}"]),
    );
    let executor =
        TemplateExecutor::new(store, "param_sub", r#"{"ServerName": "my-server"}"#).unwrap();

    let decoded = decode_payload(&executor.execute().unwrap());
    assert!(decoded.contains("echo my-server"));
    assert!(!decoded.contains("{{"));
}

#[test]
fn script_substitution_ignores_request_parameters() {
    let store = store_with(DeploymentDescription::new("separate", "Separate", ""));
    let bundle = InMemoryScriptBundle::empty().with_script("a.sh", "{{ .ServerName }}");
    let executor = TemplateExecutor::new(store, "separate", r#"{"ServerName": "from-params"}"#)
        .unwrap()
        .with_injector(injector(bundle, MapVariables::new()));

    let decoded = decode_payload(&executor.execute().unwrap());
    let config = CloudConfig::parse(decoded.as_bytes()).unwrap();

    assert!(!decoded.contains("from-params"));
    assert_eq!(config.write_files.len(), 1);
}

#[test]
fn invalid_parameter_json_yields_no_executor() {
    let store = store_with(DeploymentDescription::new("json_test", "JSON Test", ""));
    let result = TemplateExecutor::new(store, "json_test", "{invalid json}");

    assert!(matches!(result, Err(AppError::ParseError { .. })));
}

#[test]
fn shared_store_executor() {
    let ctx = ztp::AppContext::shared();
    ctx.store().create(&DeploymentDescription::new("global_executor", "Global", "")).unwrap();

    assert!(ztp::retrieve_executor("global_executor", "{}").is_ok());
    assert!(ztp::retrieve_executor("definitely_nonexistent_template", "{}").is_err());

    ctx.store().delete("global_executor").unwrap();
}
