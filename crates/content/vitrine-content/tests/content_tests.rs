use vitrine_content::{
    builtin_skills, filter_projects, load_projects, load_skills, Category, ContentError,
    ProjectFilter,
};
use vitrine_test_fixtures::content;

fn projects() -> Vec<vitrine_content::Project> {
    let json = content::json("projects").expect("projects fixture");
    load_projects(&json).expect("projects parse")
}

#[test]
fn all_filter_keeps_every_project_in_order() {
    let all = projects();
    let shown = filter_projects(&all, ProjectFilter::All);
    let ids: Vec<_> = shown.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4", "5"]);
}

#[test]
fn category_filters_partition_the_list() {
    let all = projects();
    let mut total = 0;
    for category in Category::ALL {
        let shown = filter_projects(&all, ProjectFilter::Category(category));
        assert!(shown.iter().all(|p| p.category == category));
        total += shown.len();
    }
    assert_eq!(total, all.len());

    let videos = filter_projects(&all, "video".parse().unwrap());
    let titles: Vec<_> = videos.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Marathon de Lyon", "Documentaire Boxe"]);
}

#[test]
fn unknown_category_is_a_json_error() {
    let json = content::json("projects-invalid").unwrap();
    assert!(matches!(load_projects(&json), Err(ContentError::Json(_))));
}

#[test]
fn duplicate_project_ids_are_rejected() {
    let mut all = projects();
    all[1].id = all[0].id.clone();
    let json = serde_json::to_string(&all).unwrap();
    match load_projects(&json) {
        Err(ContentError::DuplicateId { kind, id }) => {
            assert_eq!(kind, "project");
            assert_eq!(id, "1");
        }
        other => panic!("expected duplicate id error, got {other:?}"),
    }
}

#[test]
fn out_of_range_skill_fails_the_whole_document() {
    let json = content::json("skills-out-of-range").unwrap();
    let err = load_skills(&json).unwrap_err();
    assert!(err.to_string().contains("Blender"));
}

#[test]
fn builtin_skills_render_as_bar_widths() {
    let widths: Vec<_> = builtin_skills()
        .unwrap()
        .iter()
        .map(|s| s.data_width())
        .collect();
    assert_eq!(
        widths,
        ["95%", "90%", "85%", "75%", "80%", "95%", "90%", "85%"]
    );
}
