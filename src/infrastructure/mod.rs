pub mod recommenders;
