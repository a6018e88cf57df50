// Multi-step analysis stages shared by the CLI commands.

pub mod corpus;
