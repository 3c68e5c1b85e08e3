mod common;

use common::{TestContext, WEB_SERVER_DESCRIPTION, decode_payload};
use predicates::prelude::*;

#[test]
fn render_prints_base64_payload() {
    let ctx = TestContext::new();
    let description = ctx.write_file("web.json", WEB_SERVER_DESCRIPTION);

    let output = ctx
        .cli()
        .args(["render", "--description"])
        .arg(&description)
        .args(["--params", r#"{"ServerName": "edge-01"}"#])
        .output()
        .expect("failed to run ztp");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let decoded = decode_payload(&String::from_utf8(output.stdout).unwrap());
    assert!(decoded.starts_with("#cloud-config\n"));
    assert!(decoded.contains("echo edge-01"));
    assert!(decoded.contains("/var/lib/cloud/scripts/per-once/zzzz-report-ready.sh"));
}

#[test]
fn render_reads_params_file_and_decodes() {
    let ctx = TestContext::new();
    let description = ctx.write_file("web.json", WEB_SERVER_DESCRIPTION);
    let params = ctx.write_file("params.json", r#"{"ServerName": "edge-02"}"#);

    ctx.cli()
        .args(["render", "--decode", "--description"])
        .arg(&description)
        .arg("--params-file")
        .arg(&params)
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to edge-02"));
}

#[test]
fn render_without_scripts_when_disabled() {
    let ctx = TestContext::new();
    let description = ctx.write_file("web.json", WEB_SERVER_DESCRIPTION);
    let config = ctx.write_file("ztp.toml", "[scripts]\nenabled = false\n");

    ctx.cli()
        .arg("--config")
        .arg(&config)
        .args(["render", "--decode", "--description"])
        .arg(&description)
        .args(["--params", r#"{"ServerName": "edge-03"}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("zzzz-").not())
        .stdout(predicate::str::contains("echo edge-03"));
}

#[test]
fn render_uses_script_directory_and_environment() {
    let ctx = TestContext::new();
    let description = ctx.write_file("web.json", WEB_SERVER_DESCRIPTION);
    ctx.write_file("scripts/hello.sh", "echo {{ .Greeting }}\n");
    let config = ctx.write_file(
        "ztp.toml",
        &format!("[scripts]\ndir = {:?}\n", ctx.work_dir().join("scripts").display().to_string()),
    );

    ctx.cli()
        .arg("--config")
        .arg(&config)
        .arg("scripts")
        .env("GREETING", "hi")
        .assert()
        .success()
        .stdout(predicate::str::contains("hello.sh"))
        .stdout(predicate::str::contains("Greeting <- $GREETING (set)"));

    ctx.cli()
        .arg("--config")
        .arg(&config)
        .args(["render", "--decode", "--description"])
        .arg(&description)
        .args(["--params", r#"{"ServerName": "edge-04"}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("/var/lib/cloud/scripts/per-once/zzzz-hello.sh"));
}

#[test]
fn render_with_invalid_params_fails() {
    let ctx = TestContext::new();
    let description = ctx.write_file("web.json", WEB_SERVER_DESCRIPTION);

    ctx.cli()
        .args(["render", "--description"])
        .arg(&description)
        .args(["--params", "{invalid json}"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Failed to parse parameters"));
}

#[test]
fn render_with_missing_parameter_fails() {
    let ctx = TestContext::new();
    let description = ctx.write_file("web.json", WEB_SERVER_DESCRIPTION);

    ctx.cli()
        .args(["render", "--description"])
        .arg(&description)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to render template web_server"));
}

#[test]
fn generate_json_prints_description_and_content() {
    let ctx = TestContext::new();
    let description = ctx.write_file("web.json", WEB_SERVER_DESCRIPTION);

    let output = ctx
        .cli()
        .args(["generate", "--json", "--description"])
        .arg(&description)
        .output()
        .expect("failed to run ztp");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["description"]["id"], "web_server");
    assert_eq!(value["description"]["parameters"]["ServerName"], "Public host name");
    assert!(value["content"].as_str().unwrap().contains("echo {{ .ServerName }}"));
}

#[test]
fn meta_list_and_show() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["meta", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("description.json.j2"))
        .stdout(predicate::str::contains("template.yaml.j2"));

    ctx.cli()
        .args(["meta", "show", "template.yaml.j2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("#cloud-config"));

    ctx.cli().args(["meta", "show", "missing.j2"]).assert().failure();
}

#[test]
fn env_name_prints_normalized_name() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["env-name", "HTTPServer"])
        .assert()
        .success()
        .stdout("H_T_T_P_SERVER\n");
}

#[test]
fn invalid_config_is_reported() {
    let ctx = TestContext::new();
    let config = ctx.write_file("ztp.toml", "[logging]\nlevel = \"loud\"\n");

    ctx.cli()
        .arg("--config")
        .arg(&config)
        .args(["env-name", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid log level"));
}
