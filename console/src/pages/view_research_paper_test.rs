use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::net::MockDataSource;
use crate::state::view_state::load_detail;

fn load(id: &str) -> DetailState<ResearchPaper> {
    let cell = Rc::new(RefCell::new(DetailState::default()));
    block_on(load_detail(&cell, "research paper", MockDataSource::immediate().get_paper(id)));
    cell.borrow().clone()
}

#[test]
fn missing_or_blank_id_means_sample() {
    assert_eq!(paper_id_from_query(None), "sample");
    assert_eq!(paper_id_from_query(Some("")), "sample");
    assert_eq!(paper_id_from_query(Some("   ")), "sample");
    assert_eq!(paper_id_from_query(Some("p-42")), "p-42");
}

#[test]
fn requested_id_loads_sample_content() {
    let state = load("p-42");
    let paper = state.item().unwrap();
    assert_eq!(paper.id, "p-42");
    assert_eq!(paper.title, "Sample Research Paper");
    assert_eq!(paper.reproducibility_artifacts, vec!["dataset", "hyperparameters"]);
    assert!(paper.experiment_config.is_some());
}

#[test]
fn blank_id_is_not_found() {
    assert_eq!(load(""), DetailState::Missing);
}

#[test]
fn byline_joins_authors_and_long_date() {
    let mut paper = load("sample").item().cloned().unwrap();
    paper.created_date = "2026-10-16T08:00:00Z".to_owned();
    assert_eq!(byline(&paper), "By Jane Doe, John Smith on October 16, 2026");
}

#[test]
fn body_markdown_renders_heading() {
    let paper = load("sample").item().cloned().unwrap();
    assert!(render_markdown_html(&paper.content).contains("<h1>Introduction</h1>"));
}
