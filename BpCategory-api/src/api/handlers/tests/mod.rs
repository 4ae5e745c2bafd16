mod form_test;
mod health_test;
