mod dashboard_tests;
mod image_tests;
