//! Positions, shapes and transformation chains.

nexus_base_class! {
    /// Collection of axis-based translations and rotations describing a geometry.
    NXtransformations {
        field AXISNAME = "AXISNAME": NX_NUMBER [NX_TRANSFORMATION]
            attrs ["transformation_type", "vector", "offset", "offset_units",
                   "depends_on", "equipment_component"];
        field AXISNAME_END = "AXISNAME_end": NX_NUMBER [NX_TRANSFORMATION];
        field AXISNAME_INCREMENT_SET = "AXISNAME_increment_set": NX_NUMBER [NX_TRANSFORMATION];
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// Legacy class describing the shape and position of a component.
    NXgeometry {
        field DESCRIPTION = "description": NX_CHAR;
        field COMPONENT_INDEX = "component_index": NX_INT;
        group SHAPE = "shape": NXshape;
        group TRANSLATION = "translation": NXtranslation;
        group ORIENTATION = "orientation": NXorientation;
    }
}

nexus_base_class! {
    /// Legacy class describing the shape of a component.
    NXshape {
        field SHAPE = "shape": NX_CHAR
            enum ["nxflat", "nxcylinder", "nxbox", "nxsphere", "nxcone",
                  "nxelliptical", "nxtoroidal", "nxparabolic", "nxpolynomial"];
        field SIZE = "size": NX_FLOAT [NX_LENGTH];
        field DIRECTION = "direction": NX_CHAR enum ["concave", "convex"];
    }
}

nexus_base_class! {
    /// Legacy class describing a translation in space.
    NXtranslation {
        field DISTANCES = "distances": NX_FLOAT [NX_LENGTH];
        group GEOMETRY = "geometry": NXgeometry;
    }
}

nexus_base_class! {
    /// Legacy class describing an orientation in space.
    NXorientation {
        field VALUE = "value": NX_FLOAT [NX_UNITLESS];
        group GEOMETRY = "geometry": NXgeometry;
    }
}

nexus_base_class! {
    /// Geometry described with the Object File Format (OFF).
    NXoff_geometry {
        field VERTICES = "vertices": NX_NUMBER [NX_LENGTH];
        field WINDING_ORDER = "winding_order": NX_INT;
        field FACES = "faces": NX_INT;
        field DETECTOR_FACES = "detector_faces": NX_INT;
    }
}

nexus_base_class! {
    /// Geometry described as a set of cylinders.
    NXcylindrical_geometry {
        field VERTICES = "vertices": NX_NUMBER [NX_LENGTH];
        field CYLINDERS = "cylinders": NX_INT;
        field DETECTOR_NUMBER = "detector_number": NX_INT;
    }
}

nexus_base_class! {
    /// A generic positioner such as a motor or piezo-electric transducer.
    NXpositioner {
        field NAME = "name": NX_CHAR;
        field DESCRIPTION = "description": NX_CHAR;
        field VALUE = "value": NX_NUMBER [NX_ANY];
        field RAW_VALUE = "raw_value": NX_NUMBER [NX_ANY];
        field TARGET_VALUE = "target_value": NX_NUMBER [NX_ANY];
        field TOLERANCE = "tolerance": NX_NUMBER [NX_ANY];
        field SOFT_LIMIT_MIN = "soft_limit_min": NX_NUMBER [NX_ANY];
        field SOFT_LIMIT_MAX = "soft_limit_max": NX_NUMBER [NX_ANY];
        field VELOCITY = "velocity": NX_NUMBER [NX_ANY];
        field ACCELERATION_TIME = "acceleration_time": NX_NUMBER [NX_ANY];
        field CONTROLLER_RECORD = "controller_record": NX_CHAR;
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}
