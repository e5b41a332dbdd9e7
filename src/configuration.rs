use std::cell::{
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;


use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::math::integration::simpson::SimpsonRule;
use crate::math::integration::simpsonrulemanager::SimpsonRuleManager;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    simpson_rule: Vec<serde_json::Value>
}

pub struct Configuration {
    simpson_rule_manager_cell: RefCell<Manager<SimpsonRule>>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            simpson_rule_manager_cell: RefCell::new(SimpsonRuleManager::new())
        }
    }

    pub fn simpson_rule_manager(&self) -> RefMut<'_, Manager<SimpsonRule>> {
        self.simpson_rule_manager_cell.borrow_mut()
    }

    pub fn from_json_value(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
        let empty_support = ();
        let simpson_rule_manager = self.simpson_rule_manager_cell.borrow_mut();
        simpson_rule_manager.insert_obj_from_json_vec(&json_prop.simpson_rule, &empty_support)?;
        log::info!("loaded {} simpson rule(s)", json_prop.simpson_rule.len());
        Ok(())
    }

    pub fn from_reader(&self, file_path: String) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        self.from_json_value(json_value)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
