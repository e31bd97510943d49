use anyhow::Result;

use clustergen::asset::dependency_tree;
use clustergen::asset::manifests::{ClusterK8sIo, Networking};
use clustergen::asset::Asset;

fn roots() -> Vec<Box<dyn Asset>> {
    vec![Box::new(Networking::default()), Box::new(ClusterK8sIo::default())]
}

pub fn cmd_graph(json: bool) -> Result<()> {
    for root in roots() {
        let tree = dependency_tree(&*root);
        if json {
            crate::ui::json::emit(serde_json::to_value(&tree)?)?;
        } else {
            print!("{}", tree.render());
        }
    }
    Ok(())
}
