use crate::common::{TestProject, init_fixture_repo};

#[test]
fn talk_copies_files_and_folders() {
    let project = TestProject::new();
    project.write_file("notebooks/intro.ipynb", "{}");
    project.write_file("img/logo.png", "png");
    project.write_file("img/maps/world.png", "map");
    project.write_talks(
        "demo:\n    files:\n        - notebooks/intro.ipynb\n    folders:\n        img: assets/img\n",
    );

    let output = project.run_ogn(&["talk", "demo"], &[]);
    assert!(output.status.success(), "talk failed: {output:?}");

    assert!(project.path("demo/intro.ipynb").is_file());
    assert!(project.path("demo/assets/img/logo.png").is_file());
    assert!(project.path("demo/assets/img/maps/world.png").is_file());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Talk bundle: demo"));
    assert!(stdout.contains("copied intro.ipynb"));
}

#[test]
fn talk_rerun_keeps_existing_folder_and_recopies_files() {
    let project = TestProject::new();
    project.write_file("notebooks/intro.ipynb", "v1");
    project.write_file("img/logo.png", "png");
    project.write_talks(
        "demo:\n    files:\n        - notebooks/intro.ipynb\n    folders:\n        img: img\n",
    );

    assert!(project.run_ogn(&["talk", "demo"], &[]).status.success());

    // Second run: folder is skipped, file copy refreshes the content.
    project.write_file("notebooks/intro.ipynb", "v2");
    std::fs::write(project.path("demo/img/extra.txt"), "kept").unwrap();
    let output = project.run_ogn(&["talk", "demo"], &[]);
    assert!(output.status.success());

    assert_eq!(
        std::fs::read_to_string(project.path("demo/intro.ipynb")).unwrap(),
        "v2"
    );
    assert!(project.path("demo/img/extra.txt").is_file());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("kept existing folder img"));
}

#[test]
fn talk_clean_removes_stale_bundle() {
    let project = TestProject::new();
    project.write_file("a.txt", "a");
    project.write_file("demo/stale.txt", "old");
    project.write_talks("demo:\n    files: [a.txt]\n");

    let output = project.run_ogn(&["talk", "demo", "--clean"], &[]);
    assert!(output.status.success());

    assert!(!project.path("demo/stale.txt").exists());
    assert!(project.path("demo/a.txt").is_file());
}

#[test]
fn talk_applies_rename_after_copy() {
    let project = TestProject::new();
    project.write_file("a.txt", "a");
    project.write_talks("demo:\n    files: [a.txt]\n    rename:\n        a.txt: b.txt\n");

    let output = project.run_ogn(&["talk", "demo"], &[]);
    assert!(output.status.success());

    assert!(project.path("demo/b.txt").is_file());
    assert!(!project.path("demo/a.txt").exists());
}

#[test]
fn talk_missing_source_fails_and_creates_no_placeholder() {
    let project = TestProject::new();
    project.write_talks("demo:\n    files: [nonexistent.txt]\n");

    let output = project.run_ogn(&["talk", "demo"], &[]);
    assert!(!output.status.success());
    assert!(!project.path("demo/nonexistent.txt").exists());
}

#[test]
fn talk_fetches_notebook_collection_on_demand() {
    let project = TestProject::new();
    let fixture = project.path("fixtures/MHM-Groups-Dashboard");
    std::fs::create_dir_all(&fixture).unwrap();
    init_fixture_repo(&fixture, &[("dashboard.ipynb", "{}")]);

    project.write_talks("demo:\n    files:\n        - nbcollection/MHM-Groups-Dashboard/dashboard.ipynb\n");

    let output = project.run_ogn(
        &["talk", "demo"],
        &[
            ("OGN_NOTEBOOK_FOLDER", "nbcollection"),
            ("OGN_REPOS", fixture.to_str().unwrap()),
        ],
    );
    assert!(output.status.success(), "talk failed: {output:?}");

    assert!(
        project
            .path("nbcollection/MHM-Groups-Dashboard/dashboard.ipynb")
            .is_file()
    );
    assert!(project.path("demo/dashboard.ipynb").is_file());
}
