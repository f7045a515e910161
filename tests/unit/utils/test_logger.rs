use loop_client::utils::logger::{parse_log_level, setup_logger};
use tracing::Level;

#[test]
fn log_levels_are_parsed_case_insensitively() {
    assert_eq!(parse_log_level("debug"), Level::DEBUG);
    assert_eq!(parse_log_level("TRACE"), Level::TRACE);
    assert_eq!(parse_log_level("Warn"), Level::WARN);
    assert_eq!(parse_log_level("error"), Level::ERROR);
    assert_eq!(parse_log_level("info"), Level::INFO);
}

#[test]
fn unknown_log_level_defaults_to_info() {
    assert_eq!(parse_log_level(""), Level::INFO);
    assert_eq!(parse_log_level("verbose"), Level::INFO);
}

#[test]
fn setup_logger_can_be_called_repeatedly() {
    setup_logger();
    setup_logger();
    tracing::info!("logger ready");
}
