mod api_tests;
mod chart_tests;
