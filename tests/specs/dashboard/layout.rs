use crate::prelude::*;

#[test]
fn empty_dashboard() {
    let temp = Project::empty();
    temp.dxw().args(&["dashboard", "show"]).passes().stdout_eq("No groups\n");
}

#[test]
fn first_add_creates_a_group() {
    let temp = Project::empty();
    temp.dxw()
        .args(&["dashboard", "add", "Job Monitor"])
        .passes()
        .stdout_eq("Added 'Job Monitor' (Job Monitor0) to 'Group 1'\n");
    temp.dxw()
        .args(&["dashboard", "show"])
        .passes()
        .stdout_eq("▾ Group 1\n    Job Monitor [Job Monitor0] Job Monitor\n");
}

#[test]
fn layout_survives_between_runs() {
    let temp = Project::empty();
    temp.dxw().args(&["dashboard", "add", "Job Monitor", "--title", "Mine"]).passes();
    temp.dxw().args(&["dashboard", "new-group"]).passes().stdout_has("Group 2");

    let show = temp.dxw().args(&["-o", "json", "dashboard", "show"]).passes();
    let groups = show.json();
    assert_eq!(groups.as_array().unwrap().len(), 2);
    assert_eq!(groups[0]["items"][0]["title"], "Mine");
    assert!(temp.state_dir().join("savedDashboardData.json").exists());
}

#[test]
fn unknown_app_type_fails() {
    let temp = Project::empty();
    temp.dxw().args(&["dashboard", "add", "Spreadsheet"]).fails().stderr_has("Spreadsheet");
}

#[test]
fn rename_collision_changes_nothing() {
    let temp = Project::empty();
    temp.dxw().args(&["dashboard", "add", "Job Monitor"]).passes();
    temp.dxw().args(&["dashboard", "new-group"]).passes();
    temp.dxw()
        .args(&["dashboard", "rename-group", "Group 2", "Group 1"])
        .fails()
        .code_is(2)
        .stderr_has("Nothing changed");
}

#[test]
fn collapsed_group_hides_items() {
    let temp = Project::empty();
    temp.dxw().args(&["dashboard", "add", "Job Monitor"]).passes();
    temp.dxw().args(&["dashboard", "toggle", "Group 1"]).passes().stdout_eq("Collapsed 'Group 1'\n");
    temp.dxw().args(&["dashboard", "show"]).passes().stdout_eq("▸ Group 1\n");
}

#[test]
fn move_between_groups() {
    let temp = Project::empty();
    temp.dxw().args(&["dashboard", "add", "Job Monitor"]).passes();
    temp.dxw().args(&["dashboard", "new-group"]).passes();
    temp.dxw()
        .args(&["dashboard", "move", "Job Monitor0", "--group", "Group 2"])
        .passes()
        .stdout_has("Moved Job Monitor0 to 'Group 2'");

    let groups = temp.dxw().args(&["-o", "json", "dashboard", "show"]).passes().json();
    assert!(groups[0]["items"].as_array().unwrap().is_empty());
    assert_eq!(groups[1]["items"][0]["id"], "Job Monitor0");
}

#[test]
fn move_onto_itself_changes_nothing() {
    let temp = Project::empty();
    temp.dxw().args(&["dashboard", "add", "Job Monitor"]).passes();
    temp.dxw()
        .args(&["dashboard", "move", "Job Monitor0", "--group", "Group 1", "--index", "0"])
        .fails()
        .code_is(2);
}

#[test]
fn delete_group_reports_items() {
    let temp = Project::empty();
    temp.dxw().args(&["dashboard", "add", "Job Monitor"]).passes();
    temp.dxw()
        .args(&["dashboard", "delete-group", "Group 1"])
        .passes()
        .stdout_eq("Deleted group 'Group 1' and 1 item(s)\n");
    temp.dxw().args(&["dashboard", "show"]).passes().stdout_eq("No groups\n");
}

#[test]
fn apps_lists_builtin_types() {
    cli().args(&["dashboard", "apps"]).passes().stdout_has("Job Monitor").stdout_has("Base Application");
}
