mod common;
mod test_client;
