use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn inputs(graph: &mut Graph, values: &[f64]) -> Vec<NodeId> {
    values.iter().map(|&v| graph.leaf(v)).collect()
}

#[test]
fn test_layer_returns_one_output_per_neuron() -> Result<(), ScalarGradError> {
    let mut rng = StdRng::seed_from_u64(3);
    let mut graph = Graph::new();
    let layer = Layer::new(&mut graph, &mut rng, 3, 4);
    assert_eq!(layer.in_features(), 3);
    assert_eq!(layer.out_features(), 4);

    let x = inputs(&mut graph, &[1.0, -2.0, 0.5]);
    let out = layer.forward(&mut graph, &x)?;
    let nodes = match out {
        Output::Vector(nodes) => nodes,
        Output::Scalar(_) => panic!("four neurons must not be unwrapped"),
    };
    assert_eq!(nodes.len(), 4);
    for (node, neuron) in nodes.iter().zip(layer.neurons()) {
        let y = graph.value(*node)?;
        assert!(y > -1.0 && y < 1.0);
        // Same inputs, same neuron: identical value when evaluated alone.
        let alone = neuron.activate(&mut graph, &x)?;
        assert_eq!(graph.value(alone)?, y);
    }
    Ok(())
}

#[test]
fn test_single_neuron_layer_is_unwrapped() -> Result<(), ScalarGradError> {
    let mut rng = StdRng::seed_from_u64(3);
    let mut graph = Graph::new();
    let layer = Layer::new(&mut graph, &mut rng, 2, 1);
    let x = inputs(&mut graph, &[0.1, 0.2]);
    let out = layer.forward(&mut graph, &x)?;
    assert!(out.scalar().is_some());
    Ok(())
}

#[test]
fn test_layer_parameters_in_neuron_order() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut graph = Graph::new();
    let layer = Layer::new(&mut graph, &mut rng, 2, 3);
    let params = layer.parameters();
    assert_eq!(params.len(), 3 * (2 + 1));
    let expected: Vec<NodeId> = layer.neurons().iter().flat_map(|n| n.parameters()).collect();
    assert_eq!(params, expected);

    let named = layer.named_parameters();
    assert_eq!(named[0].0, "neuron0.w0");
    assert_eq!(named[2].0, "neuron0.b");
    assert_eq!(named[8].0, "neuron2.b");
    for (name, id) in named {
        assert_eq!(graph.label(id).expect("known node"), Some(name.as_str()));
    }
}

#[test]
fn test_layer_width_mismatch() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut graph = Graph::new();
    let layer = Layer::new(&mut graph, &mut rng, 2, 2);
    let x = inputs(&mut graph, &[1.0, 2.0, 3.0]);
    assert_eq!(
        layer.forward(&mut graph, &x),
        Err(ScalarGradError::InputWidthMismatch { expected: 2, actual: 3 })
    );
}

#[test]
fn test_layer_zero_grad_resets_all_neurons() -> Result<(), ScalarGradError> {
    let mut rng = StdRng::seed_from_u64(9);
    let mut graph = Graph::new();
    let layer = Layer::new(&mut graph, &mut rng, 2, 2);
    let x = inputs(&mut graph, &[0.3, -0.7]);
    let outs = layer.forward(&mut graph, &x)?.into_vec();
    let total = graph.sum(&outs)?;
    graph.backward(total)?;
    assert!(layer.parameters().iter().any(|&p| graph.grad(p).map_or(false, |g| g != 0.0)));

    layer.zero_grad(&mut graph)?;
    for p in layer.parameters() {
        assert_eq!(graph.grad(p)?, 0.0);
    }
    Ok(())
}
