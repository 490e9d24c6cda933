mod user_profile_test;
