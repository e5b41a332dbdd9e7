use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::math::integration::simpson::SimpsonRule;


#[derive(Deserialize)]
struct SimpsonRuleJsonProp {
    name: String,
    subintervals: i64
}


fn get_simpson_rule_from_json(json_value: serde_json::Value) -> Result<SimpsonRule, ManagerError> {
    let json_prop: SimpsonRuleJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    let rule = SimpsonRule::new(json_prop.name, json_prop.subintervals)?;
    Ok(rule)
}


pub struct SimpsonRuleManager {}

impl SimpsonRuleManager {
    pub fn new() -> Manager<SimpsonRule> {
        Manager::new(get_simpson_rule_from_json)
    }
}
