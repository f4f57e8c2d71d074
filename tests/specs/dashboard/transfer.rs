use crate::prelude::*;

#[test]
fn export_then_import_into_a_fresh_dashboard() {
    let source = Project::empty();
    source.dxw().args(&["dashboard", "add", "Job Monitor", "--title", "Failures"]).passes();
    source.dxw().args(&["monitor", "apply", "Failures0", "Status = Failed"]).passes();
    let export = source.dxw().args(&["dashboard", "export"]).passes();
    let doc = export.json();
    assert_eq!(doc[0]["appType"], "Job Monitor");
    assert_eq!(doc[0]["appName"], "Failures");

    let target = Project::empty();
    let file = target.file("export.json", export.stdout());
    target
        .dxw()
        .args(&["dashboard", "import", file.to_str().unwrap()])
        .passes()
        .stdout_eq("Imported 1 application\n");
    target.dxw().args(&["dashboard", "show"]).passes().stdout_has("Failures");
    target.dxw().args(&["monitor", "show", "Failures0"]).passes().stdout_has("Status = Failed");
}

#[test]
fn import_from_stdin() {
    let temp = Project::empty();
    let doc = r#"[
        {"appType": "Base Application", "appName": "Notes", "state": "null"},
        {"appType": "Job Monitor", "appName": "Jobs", "state": "{}"}
    ]"#;
    temp.dxw()
        .args(&["-o", "json", "dashboard", "import", "-"])
        .stdin(doc)
        .passes()
        .stdout_has("\"skipped\": 1");
}

#[test]
fn import_rejects_invalid_json() {
    let temp = Project::empty();
    temp.dxw()
        .args(&["dashboard", "import", "-"])
        .stdin("{not json")
        .fails()
        .code_is(1)
        .stderr_has("Invalid JSON format");
    temp.dxw().args(&["dashboard", "show"]).passes().stdout_eq("No groups\n");
}

#[test]
fn shared_link_round_trip() {
    let source = Project::empty();
    source.dxw().args(&["dashboard", "add", "Job Monitor"]).passes();
    source.dxw().args(&["dashboard", "new-group"]).passes();
    let payload = source.dxw().args(&["dashboard", "url"]).passes().stdout().trim().to_string();

    let target = Project::empty();
    let expected = source.dxw().args(&["dashboard", "show"]).passes().stdout().to_string();
    target.dxw().args(&["dashboard", "load-url", &payload]).passes().stdout_eq(&expected);
    target.dxw().args(&["dashboard", "show"]).passes().stdout_eq(&expected);
}

#[test]
fn garbage_link_fails() {
    let temp = Project::empty();
    temp.dxw().args(&["dashboard", "load-url", "!!not-base64!!"]).fails().code_is(1);
}
