pub mod virtualmachinenetworkconfig;
