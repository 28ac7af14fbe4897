use crate::vector::Vector;
use glam::{DVec2, DVec3, DVec4, IVec2, IVec3, IVec4, Vec2, Vec3, Vec4};

macro_rules! impl_glam_conversions {
    ($($glam:ty => $t:ty, $n:literal;)*) => {
        $(
            impl From<$glam> for Vector<$t, $n> {
                #[inline]
                fn from(v: $glam) -> Self {
                    Self::new(v.to_array())
                }
            }

            impl From<Vector<$t, $n>> for $glam {
                #[inline]
                fn from(v: Vector<$t, $n>) -> Self {
                    <$glam>::from_array(v.to_array())
                }
            }
        )*
    };
}

impl_glam_conversions! {
    Vec2 => f32, 2;
    Vec3 => f32, 3;
    Vec4 => f32, 4;
    DVec2 => f64, 2;
    DVec3 => f64, 3;
    DVec4 => f64, 4;
    IVec2 => i32, 2;
    IVec3 => i32, 3;
    IVec4 => i32, 4;
}

#[cfg(test)]
mod test {
    use crate::{vec3, Vector3d, Vector3f, Vector3i};
    use glam::{DVec3, IVec2, Vec3, Vec4};

    #[test]
    fn test_glam_round_trip() {
        let v = vec3(1.0_f32, -2.0, 3.5);
        let g = Vec3::from(v);
        assert_eq!(Vec3::new(1.0, -2.0, 3.5), g);
        assert_eq!(v, Vector3f::from(g));

        let d = Vector3d::from(DVec3::Z);
        assert_eq!(vec3(0.0, 0.0, 1.0), d);

        let i: Vector3i = glam::IVec3::new(4, 5, 6).into();
        assert_eq!(vec3(4, 5, 6), i);
        let g: IVec2 = crate::vec2(1_i32, 2).into();
        assert_eq!(IVec2::new(1, 2), g);
    }

    #[test]
    fn test_glam_dot_agrees() {
        let a = vec3(1.0_f32, 2.0, 3.0);
        let b = vec3(-4.0_f32, 0.5, 2.0);
        assert_eq!(Vec3::from(a).dot(Vec3::from(b)), a.dot(&b));
        let w: Vec4 = crate::vec4(1.0_f32, 2.0, 3.0, 4.0).into();
        assert_eq!(4.0, w.w);
    }
}
