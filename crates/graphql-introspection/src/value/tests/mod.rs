mod value_tests;
