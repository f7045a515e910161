mod test_logger;
