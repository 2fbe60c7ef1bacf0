use serde::{Deserialize, Serialize};

use crate::math::Angle;

/// Rotation applied to a shape around its own center, counter-clockwise.
#[derive(Clone, Debug, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation(pub Angle);

impl Rotation {
    pub fn angle(&self) -> Angle {
        self.0
    }
}

impl From<Angle> for Rotation {
    fn from(angle: Angle) -> Self {
        Rotation(angle)
    }
}
