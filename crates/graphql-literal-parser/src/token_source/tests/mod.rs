mod str_literal_token_source_tests;
