mod common;
mod warnings;
