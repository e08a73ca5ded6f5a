mod failure_tests;
mod ranking_tests;
