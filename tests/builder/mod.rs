mod tests_ordering;
mod tests_properties;
mod tests_scenarios;
mod tests_source_maps;
mod tests_uniqueness;
