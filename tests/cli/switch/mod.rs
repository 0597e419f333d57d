mod declines_creation_contract;
mod opens_existing_spec_contract;
mod skips_silently_contract;
mod switches_spec_to_source_contract;
