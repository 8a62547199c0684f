mod loop_test;
