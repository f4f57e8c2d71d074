use crate::prelude::*;

fn with_monitor() -> Project {
    let temp = Project::empty();
    temp.dxw().args(&["dashboard", "add", "Job Monitor"]).passes();
    temp
}

#[test]
fn fresh_monitor_has_no_filters() {
    let temp = with_monitor();
    temp.dxw()
        .args(&["monitor", "show", "Job Monitor0"])
        .passes()
        .stdout_eq("No filters\npage=1&per_page=25\n{\"search\":[]}\n");
}

#[test]
fn applied_filters_persist() {
    let temp = with_monitor();
    temp.dxw()
        .args(&["monitor", "apply", "Job Monitor0", "Site = CERN", "--page-size", "50", "--sort", "JobID:desc"])
        .passes()
        .stdout_has("page=1&per_page=50")
        .stdout_has(r#""direction":"desc""#);

    let shown = temp.dxw().args(&["-o", "json", "monitor", "show", "Job Monitor0"]).passes().json();
    assert_eq!(shown["state"]["pagination"]["pageSize"], 50);
    assert_eq!(shown["state"]["filters"][0]["column"], "Site");
    assert_eq!(shown["request"]["body"]["search"][0]["value"], "CERN");
}

#[test]
fn page_flag_is_one_based() {
    let temp = with_monitor();
    temp.dxw()
        .args(&["monitor", "apply", "Job Monitor0", "Site = CERN", "--page", "3"])
        .passes()
        .stdout_has("page=3&per_page=25");
}

#[test]
fn invalid_query_is_rejected() {
    let temp = with_monitor();
    temp.dxw()
        .args(&["monitor", "apply", "Job Monitor0", "JobID = abc"])
        .fails()
        .code_is(1)
        .stderr_has("incomplete or invalid");
}

#[test]
fn unknown_item_is_rejected() {
    let temp = with_monitor();
    temp.dxw().args(&["monitor", "show", "Nope0"]).fails().stderr_has("no item with id 'Nope0'");
}

#[test]
fn deleting_the_item_drops_its_state() {
    let temp = with_monitor();
    temp.dxw().args(&["monitor", "apply", "Job Monitor0", "Site = CERN"]).passes();
    assert!(temp.state_dir().join("Job%20Monitor0_State.json").exists());
    temp.dxw().args(&["dashboard", "delete-item", "Job Monitor0"]).passes();
    assert!(!temp.state_dir().join("Job%20Monitor0_State.json").exists());
}
