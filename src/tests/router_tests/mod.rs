mod leases_tests;
mod map_tests;
