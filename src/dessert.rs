//! Chapter 7: Interfaces for Data
//!
//! Record shapes, an extending record, a literal type (`Sauce`), optional
//! fields and an indexable sequence. The serde derives make the literal
//! type enforceable on input: a sauce outside the three allowed values is
//! rejected at decode time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IceCream {
    pub flavor: String,
    pub scoops: u32,
}

pub fn too_many_scoops(dessert: &IceCream) -> String {
    if dessert.scoops >= 4 {
        format!("{} is too many scoops!", dessert.scoops)
    } else {
        "Your order will be ready soon!".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sauce {
    Chocolate,
    Caramel,
    Strawberry,
}

impl fmt::Display for Sauce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sauce::Chocolate => "chocolate",
            Sauce::Caramel => "caramel",
            Sauce::Strawberry => "strawberry",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sundae {
    #[serde(flatten)]
    pub ice_cream: IceCream,
    pub sauce: Sauce,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nuts: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whipped_cream: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<bool>,
}

impl Sundae {
    pub fn new(ice_cream: IceCream, sauce: Sauce) -> Self {
        Self {
            ice_cream,
            sauce,
            nuts: None,
            whipped_cream: None,
            instructions: None,
        }
    }

    pub fn with_nuts(mut self, nuts: bool) -> Self {
        self.nuts = Some(nuts);
        self
    }

    pub fn with_whipped_cream(mut self, whipped_cream: bool) -> Self {
        self.whipped_cream = Some(whipped_cream);
        self
    }
}

/// Flavors addressable by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IceCreamArray(Vec<String>);

impl IceCreamArray {
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Index<usize> for IceCreamArray {
    type Output = String;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<S: Into<String>> FromIterator<S> for IceCreamArray {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        IceCreamArray(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vanilla(scoops: u32) -> IceCream {
        IceCream {
            flavor: "vanilla".into(),
            scoops,
        }
    }

    #[test]
    fn test_too_many_scoops_threshold() {
        assert_eq!(too_many_scoops(&vanilla(3)), "Your order will be ready soon!");
        assert_eq!(too_many_scoops(&vanilla(4)), "4 is too many scoops!");
        assert_eq!(too_many_scoops(&vanilla(5)), "5 is too many scoops!");
    }

    #[test]
    fn test_sundae_flattens_ice_cream() {
        let sundae = Sundae::new(vanilla(2), Sauce::Caramel).with_nuts(true);
        let json = serde_json::to_value(&sundae).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "flavor": "vanilla",
                "scoops": 2,
                "sauce": "caramel",
                "nuts": true
            })
        );
    }

    #[test]
    fn test_sundae_optional_fields_default_to_none() {
        let sundae: Sundae =
            serde_json::from_str(r#"{"flavor":"mint","scoops":1,"sauce":"chocolate"}"#).unwrap();
        assert_eq!(sundae.ice_cream.flavor, "mint");
        assert_eq!(sundae.sauce, Sauce::Chocolate);
        assert_eq!(sundae.nuts, None);
        assert_eq!(sundae.whipped_cream, None);
        assert_eq!(sundae.instructions, None);

        let sundae: Sundae = serde_json::from_str(
            r#"{"flavor":"mint","scoops":1,"sauce":"strawberry","whippedCream":false}"#,
        )
        .unwrap();
        assert_eq!(sundae.whipped_cream, Some(false));

        let topped = sundae.with_whipped_cream(true);
        assert_eq!(topped.whipped_cream, Some(true));
        assert_eq!(topped.nuts, None);
    }

    #[test]
    fn test_sauce_outside_literal_set_is_rejected() {
        let result: Result<Sundae, _> =
            serde_json::from_str(r#"{"flavor":"mint","scoops":1,"sauce":"butterscotch"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_ice_cream_array_indexing() {
        let flavors: IceCreamArray = ["chocolate", "vanilla", "strawberry"].into_iter().collect();
        assert_eq!(flavors[0], "chocolate");
        assert_eq!(flavors.get(2), Some("strawberry"));
        assert_eq!(flavors.get(3), None);
        assert_eq!(flavors.len(), 3);
        assert!(IceCreamArray::default().is_empty());
    }
}
