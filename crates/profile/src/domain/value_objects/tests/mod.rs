mod user_role_test;
