mod probe_table_tests;
