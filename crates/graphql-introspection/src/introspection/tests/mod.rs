mod introspection_response_tests;
