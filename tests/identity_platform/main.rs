mod callable_end_to_end_tests;
