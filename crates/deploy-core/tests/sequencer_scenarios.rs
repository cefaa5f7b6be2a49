use deploy_core::environment::EnvironmentCall;
use deploy_core::{Address, Arg, Artifact, EnvironmentError, InMemoryEnvironment, Sequence, Sequencer, SequencingError, TargetEnvironment, Value};

fn artifact(name: &str) -> Artifact {
    Artifact::new(name, vec![0x60, 0x80, 0x60, 0x40, 0x52])
}

fn accounts() -> Vec<Address> {
    vec![Address::from_bytes([0xa1; 20]), Address::from_bytes([0xa2; 20]), Address::from_bytes([0xa3; 20])]
}

#[test]
fn deploy_deploy_init_passes_first_address_to_init() {
    let seq = Sequence::builder().deploy(artifact("ArtifactA"))
                                 .deploy(artifact("ArtifactB"))
                                 .invoke(1,
                                         "init",
                                         vec![Arg::reference(0),
                                              Arg::list(vec![1u64, 2, 3]),
                                              Arg::list(accounts())])
                                 .build();

    let mut sequencer = Sequencer::new(InMemoryEnvironment::new());
    let instances = sequencer.run(&seq).expect("sequence should complete");

    assert_eq!(instances.len(), 2);
    assert_eq!(instances[0].artifact, "ArtifactA");
    assert_eq!(instances[1].artifact, "ArtifactB");
    assert_eq!(instances[0].step_index, 0);
    assert_eq!(instances[1].step_index, 1);

    let init_call = sequencer.environment()
                             .calls()
                             .iter()
                             .find_map(|c| match c {
                                 EnvironmentCall::Invoke { address, method, args } if method == "init" => Some((*address, args.clone())),
                                 _ => None,
                             })
                             .expect("init should be invoked");
    assert_eq!(init_call.0, instances[1].address);
    assert_eq!(init_call.1[0], Value::Address(instances[0].address));
    assert_eq!(init_call.1[1], Value::list(vec![1u64, 2, 3]));
    assert_eq!(init_call.1[2], Value::list(accounts()));
}

#[test]
fn reference_to_future_step_fails_before_any_deployment() {
    let seq = Sequence::builder().deploy(artifact("ArtifactA"))
                                 .invoke(0, "init", vec![Arg::reference(5)])
                                 .build();

    let mut sequencer = Sequencer::new(InMemoryEnvironment::new());
    let err = sequencer.run(&seq).unwrap_err();

    assert!(matches!(err, SequencingError::InvalidSequence { step_index: 1, .. }));
    assert!(sequencer.environment().calls().is_empty());
    assert!(sequencer.environment().contracts().is_empty());
}

#[test]
fn deployment_failure_at_first_step_returns_no_instances() {
    let env = InMemoryEnvironment::new().fail_deploy("ArtifactA", EnvironmentError::Rejected("nonce too low".into()));
    let seq = Sequence::builder().deploy(artifact("ArtifactA"))
                                 .deploy(artifact("ArtifactB"))
                                 .build();

    let mut sequencer = Sequencer::new(env);
    let err = sequencer.run(&seq).unwrap_err();

    assert_eq!(err,
               SequencingError::DeploymentFailure { step_index: 0,
                                                    artifact: "ArtifactA".into(),
                                                    cause: EnvironmentError::Rejected("nonce too low".into()) });
    assert_eq!(sequencer.environment().calls().len(), 1);
    assert!(sequencer.environment().contracts().is_empty());
}

#[test]
fn failure_at_step_k_keeps_earlier_effects_and_skips_the_rest() {
    let env = InMemoryEnvironment::new().fail_deploy("C", EnvironmentError::OutOfGas("gas limit 21000".into()));
    let seq = Sequence::builder().deploy(artifact("A"))
                                 .deploy(artifact("B"))
                                 .deploy(artifact("C"))
                                 .invoke(0, "init", vec![Arg::reference(1)])
                                 .build();

    let mut sequencer = Sequencer::new(env);
    let err = sequencer.run(&seq).unwrap_err();
    assert_eq!(err.step_index(), 2);

    let env = sequencer.into_environment();
    let names: Vec<&str> = env.contracts().values().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
    assert!(!env.calls().iter().any(|c| matches!(c, EnvironmentCall::Invoke { .. })));
}

#[test]
fn instances_match_deploy_steps_in_order() {
    let seq = Sequence::builder().deploy(artifact("A"))
                                 .invoke(0, "pause", vec![])
                                 .deploy(artifact("B"))
                                 .invoke(2, "setOwner", vec![Arg::reference(0)])
                                 .deploy(artifact("C"))
                                 .build();

    let mut env = InMemoryEnvironment::new();
    let instances = {
        let mut sequencer = Sequencer::new(&mut env);
        sequencer.run(&seq).unwrap()
    };

    assert_eq!(instances.len(), seq.deploy_count());
    let steps: Vec<usize> = instances.iter().map(|i| i.step_index).collect();
    assert_eq!(steps, vec![0, 2, 4]);

    let b = env.contract(&instances[1].address).expect("B registered");
    assert_eq!(b.invocations, vec![("setOwner".to_string(), vec![Value::Address(instances[0].address)])]);
}

#[test]
fn invoking_a_non_deploy_step_is_unresolved() {
    let seq = Sequence::builder().deploy(artifact("A"))
                                 .invoke(0, "init", vec![])
                                 .invoke(1, "init", vec![])
                                 .build();

    let mut sequencer = Sequencer::new(InMemoryEnvironment::new());
    assert_eq!(sequencer.run(&seq),
               Err(SequencingError::UnresolvedReference { step_index: 2, reference: 1 }));
    assert!(sequencer.environment().calls().is_empty());
}

#[test]
fn rerun_on_same_environment_deploys_fresh_instances() {
    let seq = Sequence::builder().deploy(artifact("A")).build();
    let mut sequencer = Sequencer::new(InMemoryEnvironment::new());

    let first = sequencer.run(&seq).unwrap();
    let second = sequencer.run(&seq).unwrap();
    assert_ne!(first[0].address, second[0].address);
    assert_eq!(sequencer.environment().contracts().len(), 2);
}

#[test]
fn boxed_environment_runs_a_sequence() {
    let mut b = Sequence::builder();
    let token = b.push_deploy(artifact("Token"));
    let vote = b.push_deploy(artifact("Vote"));
    let init = b.push_invoke(vote, "init", vec![Arg::Reference(token)]);
    assert_eq!(init.index, 2);
    let seq = b.build();

    let env: Box<dyn TargetEnvironment> = Box::new(InMemoryEnvironment::new());
    let mut sequencer = Sequencer::new(env);
    let instances = sequencer.run(&seq).expect("boxed environment should run the sequence");
    assert_eq!(instances.len(), 2);
    assert_eq!(instances[1].step_index, vote.index);
}

#[test]
fn invoke_arguments_carry_the_resolved_address() {
    let seq = Sequence::builder().deploy(artifact("Token"))
                                 .deploy(artifact("Vote"))
                                 .invoke(1, "init", vec![Arg::reference(0), Arg::literal(3u64)])
                                 .build();
    let mut env = InMemoryEnvironment::new();
    let instances = {
        let mut sequencer = Sequencer::new(Box::new(&mut env));
        sequencer.run(&seq).unwrap()
    };

    let vote = env.contract(&instances[1].address).expect("vote registered");
    let (method, args) = &vote.invocations[0];
    assert_eq!(method, "init");
    assert_eq!(args[0].as_address(), Some(&instances[0].address));
    assert_eq!(args[1].as_address(), None);
}
