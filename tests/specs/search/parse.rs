use crate::prelude::*;

#[test]
fn complete_query_prints_the_request() {
    cli()
        .args(&["search", "parse", "Status is in Done, Failed"])
        .passes()
        .stdout_has("page=1&per_page=25")
        .stdout_has(r#""operator":"in""#);
}

#[test]
fn json_report() {
    let report = cli().args(&["-o", "json", "search", "parse", "Site = CERN"]).passes().json();
    assert_eq!(report["equations"][0]["status"], "valid");
    assert_eq!(report["query"]["per_page"], 25);
    assert_eq!(report["query"]["body"]["search"][0]["operator"], "eq");
}

#[test]
fn incomplete_query_has_no_request() {
    cli()
        .args(&["search", "parse", "Site = CERN Status is in"])
        .passes()
        .stdout_has("(incomplete)")
        .stdout_lacks("per_page");
}

#[test]
fn config_page_size_applies() {
    let temp = Project::empty();
    temp.file("config.toml", "page_size = 50\n");
    temp.dxw().args(&["search", "parse", "Site = CERN"]).passes().stdout_has("per_page=50");
}

#[test]
fn suggests_column_names() {
    cli().args(&["search", "suggest", "Sta"]).passes().stdout_has("Status");
}

#[test]
fn suggests_values_from_a_dataset() {
    let temp = Project::empty();
    let rows = temp.file("rows.json", r#"[{"Site": "LCG.CERN.ch"}, {"Site": "LCG.IN2P3.fr"}]"#);
    temp.dxw()
        .args(&["search", "suggest", "Site = ", "--dataset", rows.to_str().unwrap()])
        .passes()
        .stdout_has("LCG.CERN.ch")
        .stdout_has("LCG.IN2P3.fr");
}

#[test]
fn dataset_snapshot_still_loading_offers_no_values() {
    let temp = Project::empty();
    let snapshot = temp.file("rows.json", r#"{"data": [{"Site": "LCG.CERN.ch"}], "error": null, "isLoading": true}"#);
    temp.dxw()
        .args(&["search", "suggest", "Site = ", "--dataset", snapshot.to_str().unwrap()])
        .passes()
        .stdout_lacks("LCG.CERN.ch");
}

#[test]
fn settled_dataset_snapshot_offers_values() {
    let temp = Project::empty();
    let snapshot = temp.file("rows.json", r#"{"data": [{"Site": "LCG.CERN.ch"}], "error": null, "isLoading": false}"#);
    temp.dxw()
        .args(&["search", "suggest", "Site = ", "--dataset", snapshot.to_str().unwrap()])
        .passes()
        .stdout_has("LCG.CERN.ch");
}
