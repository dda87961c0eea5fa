// Splits a command sequence across workers and runs them against one shared record.

pub mod dispatcher;
