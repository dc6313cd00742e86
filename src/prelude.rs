pub use crate::{
    error::*,
    input::{Command, InputConfig},
    render::Diagram,
    session::Session,
    testing::*,
    tree::{Branch, Node, Rank, Step, Tree, Walk},
};
