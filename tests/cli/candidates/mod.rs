mod json_output_contract;
mod lists_candidates_contract;
