#![allow(dead_code)]

use axum_test::multipart::{MultipartForm, Part};
use resource_tally::application::services::{ComparisonService, ShapePolicy};
use resource_tally::infrastructure::charts::{ChartDimensions, SvgBarChartRenderer};
use resource_tally::state::AppState;
use serde_json::Value;
use std::sync::Arc;

pub fn create_test_state() -> AppState {
    create_state_with_policy(ShapePolicy::Detect)
}

pub fn create_state_with_policy(policy: ShapePolicy) -> AppState {
    let renderer = Arc::new(SvgBarChartRenderer::new(ChartDimensions::default()));
    let comparison_service = Arc::new(ComparisonService::new(renderer, policy));

    AppState::new(comparison_service)
}

pub fn json_part(value: &Value) -> Part {
    raw_part(serde_json::to_vec(value).unwrap())
}

pub fn raw_part(bytes: Vec<u8>) -> Part {
    Part::bytes(bytes)
        .file_name("resources.json")
        .mime_type("application/json")
}

pub fn upload_form(first: &Value, second: &Value) -> MultipartForm {
    MultipartForm::new()
        .add_part("file1", json_part(first))
        .add_part("file2", json_part(second))
}
