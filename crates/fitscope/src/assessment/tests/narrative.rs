use crate::assessment::domain::Recommendation;
use crate::assessment::scoring::narrative;

#[test]
fn every_branch_offers_four_next_steps() {
    for recommendation in [
        Recommendation::Yes,
        Recommendation::Maybe,
        Recommendation::No,
    ] {
        let narrative = narrative(recommendation, 50);
        assert_eq!(narrative.next_steps.len(), 4, "{recommendation:?}");
    }
}

#[test]
fn career_path_counts_follow_the_branch() {
    assert_eq!(narrative(Recommendation::Yes, 90).career_paths.len(), 5);
    assert_eq!(narrative(Recommendation::Maybe, 60).career_paths.len(), 4);
    assert_eq!(narrative(Recommendation::No, 40).career_paths.len(), 4);
    assert_eq!(narrative(Recommendation::No, 20).career_paths.len(), 3);
}

#[test]
fn no_branch_splits_on_the_adjacent_path_floor() {
    let above = narrative(Recommendation::No, 31);
    let at = narrative(Recommendation::No, 30);

    assert_eq!(above.career_paths[0], "Data Analyst");
    assert_eq!(at.career_paths[0], "Explore non-technical roles");
}

#[test]
fn yes_branch_leads_with_the_target_role() {
    let narrative = narrative(Recommendation::Yes, 80);

    assert_eq!(narrative.career_paths[0], "Monitoring System Analyst");
    assert_eq!(
        narrative.next_steps[0],
        "Start with OS basics and networking fundamentals"
    );
}

#[test]
fn lists_are_stable_across_calls() {
    assert_eq!(
        narrative(Recommendation::Maybe, 60),
        narrative(Recommendation::Maybe, 60)
    );
}

#[test]
fn next_steps_ignore_the_score_within_a_branch() {
    assert_eq!(
        narrative(Recommendation::No, 0).next_steps,
        narrative(Recommendation::No, 54).next_steps
    );
}
