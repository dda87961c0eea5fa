// Shared record: the only mutable state workers contend on during a timed run.

pub mod concurrent_record;
