pub mod p900_deployment_plan;
