pub mod guess_number;
