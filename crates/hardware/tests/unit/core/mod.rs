/// Register file, flags, and RAM tests.
pub mod arch;
