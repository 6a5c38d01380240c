mod tests_lossless;
mod tests_syntax_errors;
