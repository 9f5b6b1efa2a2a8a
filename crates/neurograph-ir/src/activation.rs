//! Activation function tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An activation function, as attached to recurrent-cell options.
///
/// Validators treat these as opaque tags: only the number of entries in an
/// activation list is checked, never the kind itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationKind {
    Relu,
    Sigmoid,
    Softplus,
    Softsign,
    Tanh,
}

impl fmt::Display for ActivationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActivationKind::Relu => "relu",
            ActivationKind::Sigmoid => "sigmoid",
            ActivationKind::Softplus => "softplus",
            ActivationKind::Softsign => "softsign",
            ActivationKind::Tanh => "tanh",
        };
        f.write_str(name)
    }
}
