mod aggregate_test;
mod mutation_test;
mod path_test;
mod pipeline_test;
mod restructure_test;
mod set_algebra_test;
mod where_test;
