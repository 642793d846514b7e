
// Result shape tests
mod results;
