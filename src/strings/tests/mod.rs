mod integer_tests;
mod truthy_tests;
