use ogn::config::{DEFAULT_LABEXTENSIONS, DEFAULT_REPOS, Settings};

#[test]
fn defaults_match_demo_setup() {
    let settings = Settings::default();
    assert_eq!(settings.env_name, "observer_geospatial");
    assert_eq!(settings.notebook_folder, "observer-geospatial-notebooks");
    assert_eq!(settings.talks_file, "talks.yml");
    assert_eq!(settings.environment_file, "binder/environment.yml");
    assert_eq!(settings.repos, DEFAULT_REPOS);
    assert_eq!(settings.labextensions, DEFAULT_LABEXTENSIONS);
}

#[test]
fn default_repos_are_owner_name_shorthand() {
    for repo in DEFAULT_REPOS {
        assert_eq!(repo.split('/').count(), 2, "repo {repo} is owner/name");
    }
}
