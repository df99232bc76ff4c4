pub mod configuration;

pub mod annotation {
    pub mod band;
    pub mod bandset;
    pub mod bandannotator;
    pub mod labelplacer;
    pub mod annotatedrow;
}

pub mod curve {
    pub mod invalidinput;
    pub mod controlpointsequence;
    pub mod densesequence;
    pub mod curvesampler;
}

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod point2d;
        pub mod bezier {
            pub mod beziersegment;
            pub mod catmullrom;
        }
    }
    pub mod round;
}

pub mod pipeline;
