mod candidates;
mod switch;
