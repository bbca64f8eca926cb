mod common;

use common::{TestHome, path_arg, read_json};
use o3de_cli::ObjectKind;
use serde_json::json;

#[test]
fn test_edit_scalar_properties() {
    let home = TestHome::new();
    let project = home.create_object_with(
        ObjectKind::Project,
        "Game",
        json!({ "gem_names": ["Atom"], "restricted": "Game" }),
    );

    let status = home.run(&[
        "edit-project-properties",
        "--project-path",
        path_arg(&project),
        "--project-new-name",
        "BetterGame",
        "--project-origin",
        "https://example.com",
        "--project-display",
        "Better Game",
        "--project-summary",
        "A better game",
        "--project-icon",
        "preview.png",
    ]);
    assert_eq!(status, 0);

    let json = read_json(&project.join("project.json"));
    assert_eq!(json["project_name"], "BetterGame");
    assert_eq!(json["origin"], "https://example.com");
    assert_eq!(json["display_name"], "Better Game");
    assert_eq!(json["summary"], "A better game");
    assert_eq!(json["icon_path"], "preview.png");
    assert_eq!(json["gem_names"], json!(["Atom"]));
    assert_eq!(json["restricted"], "Game");
}

#[test]
fn test_add_and_delete_tags() {
    let home = TestHome::new();
    let project = home.create_object_with(
        ObjectKind::Project,
        "Game",
        json!({ "user_tags": ["Sample", "Old"] }),
    );

    let status = home.run(&[
        "edit-project-properties",
        "--project-path",
        path_arg(&project),
        "--add-tags",
        "Network",
        "Sample",
        "--delete-tags",
        "Old",
    ]);
    assert_eq!(status, 0);
    assert_eq!(
        read_json(&project.join("project.json"))["user_tags"],
        json!(["Sample", "Network"])
    );
}

#[test]
fn test_replace_tags() {
    let home = TestHome::new();
    let project = home.create_object_with(
        ObjectKind::Project,
        "Game",
        json!({ "user_tags": ["Sample", "Old"] }),
    );

    let status = home.run(&[
        "edit-project-properties",
        "--project-path",
        path_arg(&project),
        "--replace-tags",
        "A",
        "B",
        "A",
    ]);
    assert_eq!(status, 0);
    assert_eq!(
        read_json(&project.join("project.json"))["user_tags"],
        json!(["A", "B"])
    );
}

#[test]
fn test_edit_registered_project_by_name() {
    let home = TestHome::new();
    let project = home.register_object(ObjectKind::Project, "Named");

    let status = home.run(&[
        "edit-project-properties",
        "--project-name",
        "Named",
        "--project-summary",
        "Found by name",
    ]);
    assert_eq!(status, 0);
    assert_eq!(
        read_json(&project.join("project.json"))["summary"],
        "Found by name"
    );
}

#[test]
fn test_no_edits_leaves_file_untouched() {
    let home = TestHome::new();
    let project = home.create_object(ObjectKind::Project, "Game");
    let before = std::fs::read_to_string(project.join("project.json")).unwrap();

    assert_eq!(
        home.run(&["edit-project-properties", "--project-path", path_arg(&project)]),
        0
    );
    let after = std::fs::read_to_string(project.join("project.json")).unwrap();
    assert_eq!(before, after);
}
