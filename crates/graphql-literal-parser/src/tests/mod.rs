mod literal_parser_tests;
mod literal_token_stream_tests;
mod utils;
