pub mod configuration;

pub mod io {
    pub mod gridreader;
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod curve {
        pub mod curve;
    }
    pub mod integration {
        pub mod integrationerror;
        pub mod simpson;
        pub mod simpson2d;
        pub mod simpsonrulemanager;
    }
}
